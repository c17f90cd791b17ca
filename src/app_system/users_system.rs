use tokio::task::JoinHandle;
use tracing::{error, info};

use super::config::UiConfig;
use super::error::AppError;
use crate::clients::UsersClient;
use crate::component_framework::ComponentHost;
use crate::users_list::UsersList;

/// The running application: a hosted users list and its client.
///
/// Responsible for starting the host task and for waiting on it at shutdown.
pub struct UsersSystem {
    pub users_client: UsersClient,
    handles: Vec<JoinHandle<()>>,
}

impl UsersSystem {
    pub fn new(config: &UiConfig) -> Self {
        let (host, inner) = ComponentHost::<UsersList>::new(config.mailbox_size, config.list_props());
        let users_client = UsersClient::new(inner);
        let users_handle = tokio::spawn(host.run());

        info!(
            mailbox_size = config.mailbox_size,
            submit_behavior = ?config.submit_behavior,
            "Users system started"
        );

        Self {
            users_client,
            handles: vec![users_handle],
        }
    }

    /// Drops the client, which closes the mailbox, then waits for the host
    /// to unmount.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.users_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Component task failed: {:?}", e);
                return Err(AppError::Join(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
