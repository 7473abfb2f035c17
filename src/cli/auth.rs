use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::PkceSession};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceSession>>>) {
    spotify::auth::auth(shared_state).await;
}
