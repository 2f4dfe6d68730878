use async_trait::async_trait;

use std::sync::Arc;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::auth::{self, KeySource};
use crate::generator::gemini::GeminiGenerator;
use crate::session::Session;
use crate::store::Store;

pub struct ModelCommand;

#[async_trait]
impl Command for ModelCommand {
    fn name(&self) -> &str {
        "/model"
    }

    fn usage(&self) -> &str {
        "[id]"
    }

    fn description(&self) -> &str {
        "show or switch the Gemini model"
    }

    async fn execute(
        &self,
        args: &str,
        session: &mut Session,
        _info: &SessionInfo<'_>,
    ) -> CommandResult {
        let current = session.model().await;

        if args.is_empty() {
            println!("  model  {current}");
            return CommandResult::Handled;
        }

        if args.contains(char::is_whitespace) || args.contains('/') {
            eprintln!("  ✗ invalid model id: {args}");
            return CommandResult::Handled;
        }

        if args == current {
            println!("  already using {current}");
            return CommandResult::Handled;
        }

        CommandResult::StateChanged(StateChange::Model(args.to_string()))
    }
}

/// Point the session at a Gemini generator for `id`.
///
/// Returns the key source of the new generator. If the key cannot be read the
/// current generator stays in place and `None` is returned.
pub async fn switch_model(session: &Session, store: &dyn Store, id: &str) -> Option<KeySource> {
    let (api_key, source) = match auth::resolve_api_key(store) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!(model = id, error = %e, "could not read API key, keeping current model");
            eprintln!("  ✗ could not switch model: {e:#}");
            return None;
        }
    };
    let generator = GeminiGenerator::new(Some(id.to_string()), api_key);
    session.set_generator(Arc::new(generator)).await;
    println!("  ✓ model changed to {id}");
    Some(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::commands::tests::{test_info, test_session};
    use crate::consts::{API_KEY_KEY, MODEL_KEY};
    use crate::generator::mock::MockGenerator;
    use crate::store::MemoryStore;

    /// Reads always fail; writes succeed.
    struct UnreadableStore;

    impl Store for UnreadableStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("disk I/O error")
        }
        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Ok(())
        }
        fn remove(&self, _key: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn switch_uses_stored_key_and_persists_model() {
        let store = Arc::new(MemoryStore::new());
        store.set(API_KEY_KEY, "AIza-stored").unwrap();
        let session = Session::open(
            store.clone(),
            Arc::new(MockGenerator::replying("x")),
            Arc::new(MemoryClipboard::new()),
        );

        let source = switch_model(&session, store.as_ref(), "gemini-2.0-flash").await;
        assert_eq!(source, Some(KeySource::Stored));
        assert_eq!(session.model().await, "gemini-2.0-flash");
        assert_eq!(
            store.get(MODEL_KEY).unwrap().as_deref(),
            Some("gemini-2.0-flash")
        );
    }

    #[tokio::test]
    async fn unreadable_key_keeps_current_generator() {
        let session = test_session();
        let source = switch_model(&session, &UnreadableStore, "gemini-2.0-flash").await;
        assert_eq!(source, None);
        assert_eq!(session.model().await, "mock-model");
    }

    #[tokio::test]
    async fn no_args_shows_current() {
        let mut session = test_session();
        assert!(matches!(
            ModelCommand.execute("", &mut session, &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn new_id_requests_switch() {
        let mut session = test_session();
        match ModelCommand
            .execute("gemini-2.0-flash", &mut session, &test_info())
            .await
        {
            CommandResult::StateChanged(StateChange::Model(id)) => {
                assert_eq!(id, "gemini-2.0-flash")
            }
            _ => panic!("expected model change"),
        }
    }

    #[tokio::test]
    async fn same_or_invalid_id_is_handled() {
        let mut session = test_session();
        assert!(matches!(
            ModelCommand.execute("mock-model", &mut session, &test_info()).await,
            CommandResult::Handled
        ));
        assert!(matches!(
            ModelCommand.execute("models/x", &mut session, &test_info()).await,
            CommandResult::Handled
        ));
    }
}
