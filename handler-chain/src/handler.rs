use patterns_core::{HandlerResponse, Request, RequestType, Result};
use tracing::debug;

/// A node in the approval chain.
///
/// Implementors supply the request type they recognize, the action taken on a match, and storage
/// for their successor. [`Handler::handle`] provides the match-or-forward step.
pub trait Handler: Send + Sync {
    /// Name reported in [`HandlerResponse::Handled`] and in logs.
    fn name(&self) -> &'static str;

    /// The request type this handler acts on.
    fn accepts(&self) -> RequestType;

    /// Performs this handler's action on a matching request.
    fn act(&self, request: &Request) -> Result<()>;

    /// The next handler, if one was assigned.
    fn successor(&self) -> Option<&dyn Handler>;

    /// Assigns the next handler, replacing any previous one.
    fn set_successor(&mut self, next: Box<dyn Handler>);

    /// Acts on the request if it matches, otherwise forwards it. A request that matches nothing and
    /// has nowhere left to go is dropped without notification.
    fn handle(&self, request: &Request) -> Result<HandlerResponse> {
        if request.request_type == self.accepts() {
            self.act(request)?;
            return Ok(HandlerResponse::Handled {
                handler: self.name(),
            });
        }

        match self.successor() {
            Some(next) => {
                debug!(
                    handler = self.name(),
                    successor = next.name(),
                    request_type = %request.request_type,
                    "forwarding request"
                );
                next.handle(request)
            }
            None => {
                debug!(
                    handler = self.name(),
                    request_type = %request.request_type,
                    "end of chain, request dropped"
                );
                Ok(HandlerResponse::Dropped)
            }
        }
    }
}
