use crate::error::SessionResult;
use crate::handler::SessionHandler;
use crate::model::SessionId;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeState {
    Active,
    Destroyed,
    Finalized,
}

/// One request's view of a session.
///
/// The scope borrows the handler, so the final write always lands before the
/// handler (and the connection it owns) can be dropped. Call [`finalize`] to
/// observe the outcome; a scope dropped without it still flushes its payload
/// and only logs a failure.
///
/// [`finalize`]: SessionScope::finalize
pub struct SessionScope<'h, H: SessionHandler + ?Sized> {
    handler: &'h H,
    id: SessionId,
    data: String,
    state: ScopeState,
}

impl<'h, H: SessionHandler + ?Sized> SessionScope<'h, H> {
    /// Opens the session and loads its current payload.
    pub fn begin(
        handler: &'h H,
        save_path: &str,
        name: &str,
        id: SessionId,
    ) -> SessionResult<Self> {
        handler.open(save_path, name)?;
        let data = handler.read(&id)?;
        Ok(Self {
            handler,
            id,
            data,
            state: ScopeState::Active,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }

    /// Deletes the session now; nothing is written when the scope ends.
    pub fn destroy(&mut self) -> SessionResult<bool> {
        self.state = ScopeState::Destroyed;
        self.data.clear();
        self.handler.destroy(&self.id)
    }

    /// Writes the payload (unless destroyed) and closes the handler.
    pub fn finalize(mut self) -> SessionResult<bool> {
        self.flush()
    }

    fn flush(&mut self) -> SessionResult<bool> {
        let state = std::mem::replace(&mut self.state, ScopeState::Finalized);
        let written = match state {
            ScopeState::Active => self.handler.write(&self.id, &self.data),
            ScopeState::Destroyed => Ok(true),
            ScopeState::Finalized => return Ok(true),
        };
        // Close runs even when the write faulted so open/close stay paired.
        let closed = self.handler.close();
        let written = written?;
        closed?;
        Ok(written)
    }
}

impl<H: SessionHandler + ?Sized> Drop for SessionScope<'_, H> {
    fn drop(&mut self) {
        if self.state == ScopeState::Finalized {
            return;
        }
        if let Err(err) = self.flush() {
            warn!(session_id = %self.id, error = %err, "implicit session flush failed");
        }
    }
}
