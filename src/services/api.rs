//! Background API worker
//!
//! Serializes backend traffic through a priority queue with bounded
//! concurrency. The UI loop sends [`ApiRequest`]s and drains [`ApiResponse`]s
//! each frame; each request is independent, with no retry policy.

use std::collections::{HashSet, VecDeque};

use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{CmsClient, ListResponse, LoginResponse, User};
use crate::log_debug;
use crate::model::types::Record;
use crate::resources::Resource;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (navigation, delete, login)
    Medium, // Visible data (list refreshes)
    Low,    // Background refreshes
}

/// Key for in-flight tracking and concurrency limiting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    List { resource: &'static str, page: u32 },
    Detail { resource: &'static str, id: String },
    CurrentUser,
    /// Write operations never share a key
    Write(u64),
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch one page of a resource list
    LoadList {
        resource: Resource,
        page: u32,
        limit: u32,
        search: Option<String>,
        priority: Priority,
    },

    /// Fetch one record for the detail popup
    GetDetail { resource: Resource, id: String },

    /// Delete one record
    DeleteRecord { resource: Resource, id: String },

    /// Sign in with credentials
    Login { email: String, password: String },

    /// Resolve the persisted token into a user (session startup)
    GetCurrentUser,
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::LoadList { priority, .. } => *priority,
            // Everything user-blocking runs at high priority
            _ => Priority::High,
        }
    }

    fn key(&self, write_seq: &mut u64) -> RequestKey {
        match self {
            ApiRequest::LoadList { resource, page, .. } => RequestKey::List {
                resource: resource.path(),
                page: *page,
            },
            ApiRequest::GetDetail { resource, id } => RequestKey::Detail {
                resource: resource.path(),
                id: id.clone(),
            },
            ApiRequest::GetCurrentUser => RequestKey::CurrentUser,
            ApiRequest::DeleteRecord { .. } | ApiRequest::Login { .. } => {
                *write_seq += 1;
                RequestKey::Write(*write_seq)
            }
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ListResult {
        resource: Resource,
        page: u32,
        result: Result<ListResponse, anyhow::Error>,
    },

    DetailResult {
        resource: Resource,
        id: String,
        result: Result<Record, anyhow::Error>,
    },

    DeleteResult {
        resource: Resource,
        id: String,
        result: Result<(), anyhow::Error>,
    },

    LoginResult {
        result: Result<LoginResponse, anyhow::Error>,
    },

    CurrentUserResult {
        result: Result<User, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// Worker that drains the request queue against the backend
pub struct ApiService {
    client: CmsClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    write_seq: u64,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: CmsClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            write_seq: 0,
            max_concurrent: 6,
        }
    }

    /// Queue a request, high priority ahead of low
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());
        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Start the next request unless the concurrency cap is reached
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return;
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        let key = request.key(&mut self.write_seq);
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    async fn execute_request(client: &CmsClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::LoadList {
                resource,
                page,
                limit,
                search,
                ..
            } => {
                let result = client.list(resource, page, limit, search.as_deref()).await;
                if let Err(e) = &result {
                    log_debug(&format!("List {} page {} failed: {}", resource.path(), page, e));
                }
                ApiResponse::ListResult {
                    resource,
                    page,
                    result,
                }
            }

            ApiRequest::GetDetail { resource, id } => {
                let result = client.get(resource, &id).await;
                ApiResponse::DetailResult { resource, id, result }
            }

            ApiRequest::DeleteRecord { resource, id } => {
                let result = client.delete(resource, &id).await;
                ApiResponse::DeleteResult { resource, id, result }
            }

            ApiRequest::Login { email, password } => {
                let result = client.login(&email, &password).await;
                ApiResponse::LoginResult { result }
            }

            ApiRequest::GetCurrentUser => {
                let result = client.current_user().await;
                ApiResponse::CurrentUserResult { result }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: CmsClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                _ = tick.tick() => {
                    for _ in 0..4 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
