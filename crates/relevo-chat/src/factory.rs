use std::sync::Arc;

use crate::config::ChatProviderConfig;
use crate::error::ProviderError;
use crate::providers::CohereChatProvider;
use crate::traits::ChatProvider;

pub fn build_chat_provider(
    cfg: ChatProviderConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    match cfg {
        ChatProviderConfig::Cohere(c) => Ok(Arc::new(CohereChatProvider::new(c)?)),
    }
}
