// In-memory backend for screen tests
// Implements every repository trait and records each call as "METHOD path"

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;

use super::context::AppContext;
use super::navigation::History;
use super::notify::NoticeLog;
use crate::api::{ApiError, ApiResult};
use crate::auth::{MemoryTokenStore, Session};
use crate::config::ClientConfig;
use crate::domain::agent::{Agent, AgentChanges, AgentSummary, NewAgent};
use crate::domain::conversation::{
    Conversation, ConversationStatus, ConversationSummary, NewConversation,
};
use crate::domain::repositories::{
    AgentRepository, ConversationRepository, ListParams, TeamRepository, UserRepository,
};
use crate::domain::team::{NewTeam, Team, TeamChanges, TeamSummary};
use crate::domain::user::{AccessToken, Credentials, NewUser, ProfileChanges, User};

pub const PASSWORD: &str = "secret1";
pub const TOKEN: &str = "token-1";

#[derive(Default)]
pub struct FakeBackend {
    pub agents: Mutex<Vec<Agent>>,
    pub teams: Mutex<Vec<Team>>,
    pub conversations: Mutex<Vec<Conversation>>,
    pub profile: Mutex<Option<User>>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<(StatusCode, Option<String>)>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(Some(user())),
            ..Self::default()
        })
    }

    /// Every following call fails with `status` until [`FakeBackend::recover`]
    pub fn fail_with(&self, status: StatusCode, detail: Option<&str>) {
        *self.failure.lock().unwrap() = Some((status, detail.map(str::to_string)));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn with_agent(self: &Arc<Self>, id: &str, name: &str) -> Arc<Self> {
        self.agents.lock().unwrap().push(agent(id, name));
        self.clone()
    }

    pub fn with_team(self: &Arc<Self>, id: &str, agents: &[&str], entry: &str) -> Arc<Self> {
        let now = Utc::now();
        self.teams.lock().unwrap().push(Team {
            id: id.to_string(),
            name: format!("team {}", id),
            description: None,
            agents: agents.iter().map(|a| a.to_string()).collect(),
            entry_agent: entry.to_string(),
            created_by: Some("u1".to_string()),
            created_at: now,
            updated_at: now,
        });
        self.clone()
    }

    pub fn with_conversation(self: &Arc<Self>, id: &str, status: ConversationStatus) -> Arc<Self> {
        self.conversations.lock().unwrap().push(Conversation {
            id: id.to_string(),
            user_id: "u1".to_string(),
            team_id: "t1".to_string(),
            task: format!("task {}", id),
            status,
            started_at: None,
            completed_at: None,
            created_at: Utc::now(),
        });
        self.clone()
    }

    fn call(&self, call: impl Into<String>) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call.into());
        match self.failure.lock().unwrap().clone() {
            Some((status, _)) if status == StatusCode::UNAUTHORIZED => {
                Err(ApiError::Unauthorized { message: None })
            }
            Some((status, detail)) => Err(ApiError::backend(status, detail)),
            None => Ok(()),
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::backend(StatusCode::NOT_FOUND, Some(format!("{} not found", what)))
    }
}

pub fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        email: "a@b.com".to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn agent(id: &str, name: &str) -> Agent {
    let now = Utc::now();
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        system_message: format!("You are {}.", name),
        handoffs: Vec::new(),
        tools: Vec::new(),
        created_by: Some("u1".to_string()),
        created_at: now,
        updated_at: now,
    }
}

fn summarize(agent: &Agent) -> AgentSummary {
    AgentSummary {
        id: agent.id.clone(),
        name: agent.name.clone(),
        created_by: agent.created_by.clone(),
        created_at: agent.created_at,
        handoff_count: agent.handoffs.len(),
        tool_count: agent.tools.len(),
    }
}

/// Context over `backend` with a recording navigator and notifier
pub fn context(
    backend: &Arc<FakeBackend>,
    token: Option<&str>,
) -> (AppContext, Arc<History>, Arc<NoticeLog>) {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    let history = Arc::new(History::new());
    let notices = Arc::new(NoticeLog::new());
    let ctx = AppContext {
        config: ClientConfig::default(),
        session: Session::restore(Arc::new(store)),
        users: backend.clone(),
        agents: backend.clone(),
        teams: backend.clone(),
        conversations: backend.clone(),
        navigator: history.clone(),
        notifier: notices.clone(),
    };
    (ctx, history, notices)
}

#[async_trait]
impl AgentRepository for FakeBackend {
    async fn list(&self, _params: ListParams) -> ApiResult<Vec<AgentSummary>> {
        self.call("GET /agents")?;
        Ok(self.agents.lock().unwrap().iter().map(summarize).collect())
    }

    async fn get(&self, id: &str) -> ApiResult<Agent> {
        self.call(format!("GET /agents/{}", id))?;
        let agents = self.agents.lock().unwrap();
        agents
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("Agent"))
    }

    async fn create(&self, new: &NewAgent) -> ApiResult<Agent> {
        self.call("POST /agents")?;
        let mut agents = self.agents.lock().unwrap();
        let mut created = agent(&format!("a{}", agents.len() + 1), &new.name);
        created.system_message = new.system_message.clone();
        created.handoffs = new.handoffs.clone();
        created.tools = new.tools.clone();
        agents.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, changes: &AgentChanges) -> ApiResult<Agent> {
        self.call(format!("PUT /agents/{}", id))?;
        let mut agents = self.agents.lock().unwrap();
        let agent = agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Self::not_found("Agent"))?;
        if let Some(name) = &changes.name {
            agent.name = name.clone();
        }
        if let Some(message) = &changes.system_message {
            agent.system_message = message.clone();
        }
        if let Some(handoffs) = &changes.handoffs {
            agent.handoffs = handoffs.clone();
        }
        if let Some(tools) = &changes.tools {
            agent.tools = tools.clone();
        }
        Ok(agent.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.call(format!("DELETE /agents/{}", id))?;
        self.agents.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_available(&self) -> ApiResult<Vec<AgentSummary>> {
        self.call("GET /agents/available/list")?;
        Ok(self.agents.lock().unwrap().iter().map(summarize).collect())
    }
}

#[async_trait]
impl TeamRepository for FakeBackend {
    async fn list(&self, _params: ListParams) -> ApiResult<Vec<TeamSummary>> {
        self.call("GET /teams")?;
        let teams = self.teams.lock().unwrap();
        Ok(teams
            .iter()
            .map(|t| TeamSummary {
                id: t.id.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
                agent_count: t.agents.len(),
                entry_agent: t.entry_agent.clone(),
                created_at: t.created_at,
            })
            .collect())
    }

    async fn get(&self, id: &str) -> ApiResult<Team> {
        self.call(format!("GET /teams/{}", id))?;
        let teams = self.teams.lock().unwrap();
        teams
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("Team"))
    }

    async fn create(&self, new: &NewTeam) -> ApiResult<Team> {
        self.call("POST /teams")?;
        let now = Utc::now();
        let mut teams = self.teams.lock().unwrap();
        let team = Team {
            id: format!("t{}", teams.len() + 1),
            name: new.name.clone(),
            description: new.description.clone(),
            agents: new.agents.clone(),
            entry_agent: new.entry_agent.clone(),
            created_by: Some("u1".to_string()),
            created_at: now,
            updated_at: now,
        };
        teams.push(team.clone());
        Ok(team)
    }

    async fn update(&self, id: &str, changes: &TeamChanges) -> ApiResult<Team> {
        self.call(format!("PUT /teams/{}", id))?;
        let mut teams = self.teams.lock().unwrap();
        let team = teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found("Team"))?;
        if let Some(name) = &changes.name {
            team.name = name.clone();
        }
        if let Some(description) = &changes.description {
            team.description = Some(description.clone());
        }
        if let Some(agents) = &changes.agents {
            team.agents = agents.clone();
        }
        if let Some(entry) = &changes.entry_agent {
            team.entry_agent = entry.clone();
        }
        Ok(team.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.call(format!("DELETE /teams/{}", id))?;
        self.teams.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

#[async_trait]
impl ConversationRepository for FakeBackend {
    async fn list(&self) -> ApiResult<Vec<ConversationSummary>> {
        self.call("GET /conversations")?;
        let conversations = self.conversations.lock().unwrap();
        Ok(conversations
            .iter()
            .map(|c| ConversationSummary {
                id: c.id.clone(),
                task: c.task.clone(),
                team_id: c.team_id.clone(),
                status: c.status,
                created_at: c.created_at,
                started_at: c.started_at,
                completed_at: c.completed_at,
            })
            .collect())
    }

    async fn get(&self, id: &str) -> ApiResult<Conversation> {
        self.call(format!("GET /conversations/{}", id))?;
        let conversations = self.conversations.lock().unwrap();
        conversations
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("Conversation"))
    }

    async fn create(&self, new: &NewConversation) -> ApiResult<Conversation> {
        self.call("POST /conversations")?;
        let mut conversations = self.conversations.lock().unwrap();
        let conversation = Conversation {
            id: format!("c{}", conversations.len() + 1),
            user_id: "u1".to_string(),
            team_id: new.team_id.clone(),
            task: new.task.clone(),
            status: ConversationStatus::Pending,
            started_at: None,
            completed_at: None,
            created_at: Utc::now(),
        };
        conversations.push(conversation.clone());
        Ok(conversation)
    }

    async fn cancel(&self, id: &str) -> ApiResult<()> {
        self.call(format!("POST /conversations/{}/cancel", id))?;
        let mut conversations = self.conversations.lock().unwrap();
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Self::not_found("Conversation"))?;
        conversation.status = ConversationStatus::Cancelled;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.call(format!("DELETE /conversations/{}", id))?;
        self.conversations.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FakeBackend {
    async fn register(&self, new: &NewUser) -> ApiResult<User> {
        self.call("POST /users/register")?;
        Ok(User {
            id: "u2".to_string(),
            name: new.name.clone(),
            email: new.email.to_string(),
            created_at: None,
            updated_at: None,
        })
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AccessToken> {
        self.call("POST /users/login")?;
        if credentials.password != PASSWORD {
            return Err(ApiError::Unauthorized {
                message: Some("Incorrect email or password".to_string()),
            });
        }
        Ok(AccessToken {
            access_token: TOKEN.to_string(),
            token_type: "bearer".to_string(),
        })
    }

    async fn profile(&self) -> ApiResult<User> {
        self.call("GET /users/profile")?;
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::not_found("User"))
    }

    async fn update_profile(&self, changes: &ProfileChanges) -> ApiResult<User> {
        self.call("PUT /users/profile")?;
        let mut profile = self.profile.lock().unwrap();
        let user = profile.as_mut().ok_or_else(|| Self::not_found("User"))?;
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.to_string();
        }
        Ok(user.clone())
    }
}
