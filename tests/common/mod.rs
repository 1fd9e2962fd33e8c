//! In-process mock of the AgentPut backend
//!
//! Serves the `/api` REST contract on an ephemeral port. Tokens are HS256 JWTs
//! checked by the [`JwtAuth`] extractor; every request is recorded with its
//! `Authorization` header so tests can assert what the client sent.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use agentput_admin::app::{AppContext, History, NoticeLog};
use agentput_admin::auth::TokenStore;
use agentput_admin::config::ClientConfig;

pub const SECRET: &str = "mock-backend-secret";
pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "secret1";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    exp: usize,
}

pub fn create_token(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + chrono::Duration::hours(8)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_ref()),
    )
    .unwrap()
}

/// Backend-style timestamp without an offset
fn now() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MockUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockAgent {
    pub id: String,
    pub name: String,
    pub system_message: String,
    pub handoffs: Vec<String>,
    pub tools: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockTeam {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub agents: Vec<String>,
    pub entry_agent: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockConversation {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub task: String,
    pub status: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: String,
}

#[derive(Default)]
pub struct MockState {
    pub users: Mutex<Vec<MockUser>>,
    pub agents: Mutex<Vec<MockAgent>>,
    pub teams: Mutex<Vec<MockTeam>>,
    pub conversations: Mutex<Vec<MockConversation>>,
    pub requests: Mutex<Vec<Recorded>>,
}

impl MockState {
    pub fn user_id(&self) -> Uuid {
        self.users.lock().unwrap()[0].id
    }

    pub fn seed_agent(&self, name: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.agents.lock().unwrap().push(MockAgent {
            id: id.clone(),
            name: name.to_string(),
            system_message: format!("You are {}.", name),
            handoffs: Vec::new(),
            tools: Vec::new(),
            created_by: self.user_id().to_string(),
            created_at: now(),
            updated_at: now(),
        });
        id
    }

    pub fn seed_team(&self, name: &str, agents: &[&str], entry_agent: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.teams.lock().unwrap().push(MockTeam {
            id: id.clone(),
            name: name.to_string(),
            description: None,
            agents: agents.iter().map(|a| a.to_string()).collect(),
            entry_agent: entry_agent.to_string(),
            created_by: self.user_id().to_string(),
            created_at: now(),
            updated_at: now(),
        });
        id
    }

    /// Requests matching `method` and `path` (path relative to `/api`)
    pub fn count(&self, method: &str, path: &str) -> usize {
        let full = format!("/api{}", path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == full)
            .count()
    }

    pub fn last_request(&self, method: &str, path: &str) -> Option<Recorded> {
        let full = format!("/api{}", path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == full)
            .cloned()
    }
}

type Shared = Arc<MockState>;

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn missing(field: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "detail": [
                { "loc": ["body", field], "msg": "field required", "type": "value_error.missing" }
            ]
        })),
    )
        .into_response()
}

/// Bearer check for protected routes
pub struct JwtAuth(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Not authenticated"))?;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(SECRET.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"))?;

        Ok(JwtAuth(claims.claims.sub))
    }
}

async fn record(State(state): State<Shared>, request: Request, next: Next) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        authorization: request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    next.run(request).await
}

// users

#[derive(Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

async fn register(State(state): State<Shared>, Json(body): Json<RegisterBody>) -> Response {
    let mut users = state.users.lock().unwrap();
    if users.iter().any(|u| u.email == body.email) {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let user = MockUser {
        id: Uuid::new_v4(),
        name: body.name,
        email: body.email,
        password: body.password,
    };
    let response = profile_json(&user);
    users.push(user);
    (StatusCode::CREATED, Json(response)).into_response()
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginBody>) -> Response {
    let users = state.users.lock().unwrap();
    match users
        .iter()
        .find(|u| u.email == body.email && u.password == body.password)
    {
        Some(user) => Json(json!({
            "access_token": create_token(user.id),
            "token_type": "bearer"
        }))
        .into_response(),
        None => detail(StatusCode::UNAUTHORIZED, "Incorrect email or password"),
    }
}

fn profile_json(user: &MockUser) -> Value {
    json!({
        "id": user.id.to_string(),
        "name": user.name,
        "email": user.email,
        "created_at": now(),
        "updated_at": now(),
    })
}

async fn profile(State(state): State<Shared>, JwtAuth(user_id): JwtAuth) -> Response {
    let users = state.users.lock().unwrap();
    match users.iter().find(|u| u.id == user_id) {
        Some(user) => Json(profile_json(user)).into_response(),
        None => detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"),
    }
}

async fn update_profile(
    State(state): State<Shared>,
    JwtAuth(user_id): JwtAuth,
    Json(body): Json<Value>,
) -> Response {
    let mut users = state.users.lock().unwrap();
    let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
        return detail(StatusCode::UNAUTHORIZED, "Could not validate credentials");
    };
    if let Some(name) = body.get("name").and_then(Value::as_str) {
        user.name = name.to_string();
    }
    if let Some(email) = body.get("email").and_then(Value::as_str) {
        user.email = email.to_string();
    }
    Json(profile_json(user)).into_response()
}

// agents

#[derive(Deserialize)]
struct AgentBody {
    name: Option<String>,
    system_message: Option<String>,
    handoffs: Option<Vec<String>>,
    tools: Option<Vec<String>>,
}

fn agent_summary(agent: &MockAgent) -> Value {
    json!({
        "id": agent.id,
        "name": agent.name,
        "created_by": agent.created_by,
        "created_at": agent.created_at,
        "handoff_count": agent.handoffs.len(),
        "tool_count": agent.tools.len(),
    })
}

async fn list_agents(State(state): State<Shared>, _auth: JwtAuth) -> Response {
    let agents = state.agents.lock().unwrap();
    Json(agents.iter().map(agent_summary).collect::<Vec<_>>()).into_response()
}

async fn get_agent(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    let agents = state.agents.lock().unwrap();
    match agents.iter().find(|a| a.id == id) {
        Some(agent) => Json(agent.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Agent not found"),
    }
}

async fn create_agent(
    State(state): State<Shared>,
    JwtAuth(user_id): JwtAuth,
    Json(body): Json<AgentBody>,
) -> Response {
    let Some(name) = body.name else {
        return missing("name");
    };
    let Some(system_message) = body.system_message else {
        return missing("system_message");
    };

    let mut agents = state.agents.lock().unwrap();
    if agents.iter().any(|a| a.name == name) {
        return detail(StatusCode::BAD_REQUEST, "Agent name already exists");
    }
    let agent = MockAgent {
        id: Uuid::new_v4().to_string(),
        name,
        system_message,
        handoffs: body.handoffs.unwrap_or_default(),
        tools: body.tools.unwrap_or_default(),
        created_by: user_id.to_string(),
        created_at: now(),
        updated_at: now(),
    };
    agents.push(agent.clone());
    (StatusCode::CREATED, Json(agent)).into_response()
}

async fn update_agent(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
    Json(body): Json<AgentBody>,
) -> Response {
    let mut agents = state.agents.lock().unwrap();
    let Some(agent) = agents.iter_mut().find(|a| a.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Agent not found");
    };
    if let Some(name) = body.name {
        agent.name = name;
    }
    if let Some(system_message) = body.system_message {
        agent.system_message = system_message;
    }
    if let Some(handoffs) = body.handoffs {
        agent.handoffs = handoffs;
    }
    if let Some(tools) = body.tools {
        agent.tools = tools;
    }
    agent.updated_at = now();
    Json(agent.clone()).into_response()
}

async fn delete_agent(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    let mut agents = state.agents.lock().unwrap();
    let before = agents.len();
    agents.retain(|a| a.id != id);
    if agents.len() == before {
        return detail(StatusCode::NOT_FOUND, "Agent not found");
    }
    Json(json!({ "message": "Agent deleted" })).into_response()
}

// teams

#[derive(Deserialize)]
struct TeamBody {
    name: Option<String>,
    description: Option<String>,
    agents: Option<Vec<String>>,
    entry_agent: Option<String>,
}

async fn list_teams(State(state): State<Shared>, _auth: JwtAuth) -> Response {
    let teams = state.teams.lock().unwrap();
    let rows: Vec<Value> = teams
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "name": t.name,
                "description": t.description,
                "agent_count": t.agents.len(),
                "entry_agent": t.entry_agent,
                "created_at": t.created_at,
            })
        })
        .collect();
    Json(rows).into_response()
}

async fn get_team(State(state): State<Shared>, _auth: JwtAuth, Path(id): Path<String>) -> Response {
    let teams = state.teams.lock().unwrap();
    match teams.iter().find(|t| t.id == id) {
        Some(team) => Json(team.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Team not found"),
    }
}

async fn create_team(
    State(state): State<Shared>,
    JwtAuth(user_id): JwtAuth,
    Json(body): Json<TeamBody>,
) -> Response {
    let Some(name) = body.name else {
        return missing("name");
    };
    let agents = body.agents.unwrap_or_default();
    let Some(entry_agent) = body.entry_agent else {
        return missing("entry_agent");
    };
    if !agents.contains(&entry_agent) {
        return detail(StatusCode::BAD_REQUEST, "Entry agent must be a team member");
    }

    let team = MockTeam {
        id: Uuid::new_v4().to_string(),
        name,
        description: body.description,
        agents,
        entry_agent,
        created_by: user_id.to_string(),
        created_at: now(),
        updated_at: now(),
    };
    state.teams.lock().unwrap().push(team.clone());
    (StatusCode::CREATED, Json(team)).into_response()
}

async fn update_team(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
    Json(body): Json<TeamBody>,
) -> Response {
    let mut teams = state.teams.lock().unwrap();
    let Some(team) = teams.iter_mut().find(|t| t.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Team not found");
    };
    if let Some(name) = body.name {
        team.name = name;
    }
    if let Some(description) = body.description {
        team.description = (!description.is_empty()).then_some(description);
    }
    if let Some(agents) = body.agents {
        team.agents = agents;
    }
    if let Some(entry_agent) = body.entry_agent {
        team.entry_agent = entry_agent;
    }
    team.updated_at = now();
    Json(team.clone()).into_response()
}

async fn delete_team(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    state.teams.lock().unwrap().retain(|t| t.id != id);
    StatusCode::NO_CONTENT.into_response()
}

// conversations

#[derive(Deserialize)]
struct ConversationBody {
    team_id: String,
    task: String,
}

async fn list_conversations(State(state): State<Shared>, _auth: JwtAuth) -> Response {
    let conversations = state.conversations.lock().unwrap();
    let rows: Vec<Value> = conversations
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "task": c.task,
                "team_id": c.team_id,
                "status": c.status,
                "created_at": c.created_at,
                "started_at": c.started_at,
                "completed_at": c.completed_at,
            })
        })
        .collect();
    Json(rows).into_response()
}

async fn get_conversation(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    let conversations = state.conversations.lock().unwrap();
    match conversations.iter().find(|c| c.id == id) {
        Some(conversation) => Json(conversation.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Conversation not found"),
    }
}

async fn create_conversation(
    State(state): State<Shared>,
    JwtAuth(user_id): JwtAuth,
    Json(body): Json<ConversationBody>,
) -> Response {
    if !state.teams.lock().unwrap().iter().any(|t| t.id == body.team_id) {
        return detail(StatusCode::NOT_FOUND, "Team not found");
    }
    let conversation = MockConversation {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        team_id: body.team_id,
        task: body.task,
        status: "running".to_string(),
        started_at: Some(now()),
        completed_at: None,
        created_at: now(),
    };
    state.conversations.lock().unwrap().push(conversation.clone());
    (StatusCode::CREATED, Json(conversation)).into_response()
}

async fn cancel_conversation(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    let mut conversations = state.conversations.lock().unwrap();
    let Some(conversation) = conversations.iter_mut().find(|c| c.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Conversation not found");
    };
    if conversation.status != "pending" && conversation.status != "running" {
        return detail(StatusCode::BAD_REQUEST, "Conversation already finished");
    }
    conversation.status = "cancelled".to_string();
    conversation.completed_at = Some(now());
    Json(json!({ "message": "Conversation cancelled", "status": "cancelled" })).into_response()
}

async fn delete_conversation(
    State(state): State<Shared>,
    _auth: JwtAuth,
    Path(id): Path<String>,
) -> Response {
    state.conversations.lock().unwrap().retain(|c| c.id != id);
    Json(json!({ "message": "Conversation deleted" })).into_response()
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({})).into_response()
}

fn router(state: Shared) -> Router {
    let api = Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/profile", get(profile).put(update_profile))
        .route("/agents", get(list_agents).post(create_agent))
        .route("/agents/available/list", get(list_agents))
        .route(
            "/agents/:id",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/:id", get(get_team).put(update_team).delete(delete_team))
        .route(
            "/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route(
            "/conversations/:id",
            get(get_conversation).delete(delete_conversation),
        )
        .route("/conversations/:id/cancel", post(cancel_conversation))
        .route("/slow", get(slow));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl TestServer {
    /// Starts the mock with one registered user (`EMAIL` / `PASSWORD`)
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        state.users.lock().unwrap().push(MockUser {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: EMAIL.to_string(),
            password: PASSWORD.to_string(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_api_url(self.api_url())
    }

    /// Valid token for the seeded user
    pub fn token(&self) -> String {
        create_token(self.state.user_id())
    }

    pub fn connect(&self, store: Arc<dyn TokenStore>) -> (AppContext, Arc<History>, Arc<NoticeLog>) {
        let history = Arc::new(History::new());
        let notices = Arc::new(NoticeLog::new());
        let ctx = AppContext::connect(self.config(), store, history.clone(), notices.clone()).unwrap();
        (ctx, history, notices)
    }
}
