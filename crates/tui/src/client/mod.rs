use api_types::{
    ErrorResponse,
    savings::{BalanceResponse, SavingsAdded, SavingsNew, TransactionsResponse},
};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

#[derive(Debug)]
pub enum ClientError {
    /// The request never got a response.
    Transport(reqwest::Error),
    /// Non-2xx answer, with the server's `error` text when it sent one.
    Status { status: u16, message: Option<String> },
    /// The body was not the JSON we expected.
    Decode(String),
}

impl ClientError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(err) => format!("Server unreachable: {err}"),
            Self::Status {
                status,
                message: Some(message),
            } => format!("HTTP error! status: {status} ({message})"),
            Self::Status {
                status,
                message: None,
            } => format!("HTTP error! status: {status}"),
            Self::Decode(_) => "Received invalid JSON response from server".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Setting(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Decode(format!("invalid base_url: {err}")))
    }

    pub async fn balance(&self) -> std::result::Result<BalanceResponse, ClientError> {
        let res = self
            .http
            .get(self.endpoint("balance")?)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(res).await
    }

    pub async fn transactions(&self) -> std::result::Result<TransactionsResponse, ClientError> {
        let res = self
            .http
            .get(self.endpoint("transactions")?)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(res).await
    }

    pub async fn add_savings(
        &self,
        payload: &SavingsNew,
    ) -> std::result::Result<SavingsAdded, ClientError> {
        let res = self
            .http
            .post(self.endpoint("add-savings")?)
            .json(payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(res).await
    }
}

async fn read_json<T: DeserializeOwned>(
    res: reqwest::Response,
) -> std::result::Result<T, ClientError> {
    let status = res.status();
    let body = res.bytes().await.map_err(ClientError::Transport)?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .map(|err| err.error);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&body).map_err(|err| ClientError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    #[test]
    fn banner_text_distinguishes_status_and_json_failures() {
        let status = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(status.user_message(), "HTTP error! status: 500");

        let with_message = ClientError::Status {
            status: 400,
            message: Some("Amount and method are required".to_string()),
        };
        assert_eq!(
            with_message.user_message(),
            "HTTP error! status: 400 (Amount and method are required)"
        );

        let decode = ClientError::Decode("expected value".to_string());
        assert_eq!(
            decode.user_message(),
            "Received invalid JSON response from server"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(Client::new("not a url"), Err(AppError::Setting(_))));
    }

    async fn spawn_server(migrated: bool) -> Client {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        if migrated {
            migration::Migrator::up(&db, None).await.unwrap();
        }
        let engine = engine::Engine::builder().database(db).build().await.unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server::spawn_with_listener(engine, listener).unwrap();
        Client::new(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn add_then_reload_against_live_server() {
        let client = spawn_server(true).await;

        let (balance, transactions) = crate::app::fetch_initial(&client).await.unwrap();
        assert_eq!(balance, 0.0);
        assert!(transactions.is_empty());

        let added = client
            .add_savings(&SavingsNew {
                amount: Some(serde_json::json!(100)),
                method: Some("Cash".to_string()),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(added.balance, 100.0);
        assert_eq!(added.transactions.len(), 1);
        assert_eq!(added.transactions[0].description, "");

        let (balance, transactions) = crate::app::fetch_initial(&client).await.unwrap();
        assert_eq!(balance, 100.0);
        assert_eq!(transactions, added.transactions);
    }

    #[tokio::test]
    async fn validation_failure_carries_server_message() {
        let client = spawn_server(true).await;

        let err = client
            .add_savings(&SavingsNew {
                amount: Some(serde_json::json!(-10)),
                method: Some("Cash".to_string()),
                description: None,
            })
            .await
            .unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 400);
                assert!(message.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_failure_during_load_is_a_status_error() {
        let client = spawn_server(false).await;

        let mut state = crate::app::AppState::new(chrono_tz::UTC);
        state.finish_loading(crate::app::fetch_initial(&client).await);
        assert_eq!(
            state.view,
            crate::app::ViewState::Error(
                "HTTP error! status: 500 (Unable to fetch balance)".to_string()
            )
        );
        assert_eq!(state.balance, 0.0);
        assert!(state.transactions.is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&format!("http://{addr}/")).unwrap();
        let err = client.balance().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.user_message().starts_with("Server unreachable"));
    }
}
