/*!
Server-side HTTP sessions.

A session ties a sequence of requests to the same client. The server
generates a random **session id**, stores the session state in a
**session storage backend** and sends the id back to the client in a
cookie. The client returns the cookie with each request, and the server
uses the id to load the state again.

The client never sees the session state: the cookie only carries the id.

# Anatomy

- [`SessionId`]: the random identifier carried by the session cookie.
- [`SessionStore`]: a wrapper around the chosen [storage backend][store::SessionStorageBackend].
- [`SessionConfig`]: the cookie attributes and the time-to-live of server-side records.
- [`IncomingSession`]: the session id found in the cookies of the incoming request, if any.

# References

- [RFC 6265](https://datatracker.ietf.org/doc/html/rfc6265);
- [OWASP's session management cheat-sheet](https://cheatsheetseries.owasp.org/cheatsheets/Session_Management_Cheat_Sheet.html).
*/
pub mod config;
mod id;
mod incoming;
mod store_;

pub use config::SessionConfig;
pub use id::{InvalidSessionId, SessionId};
pub use incoming::IncomingSession;
pub use store_::SessionStore;

pub mod store {
    //! Types and traits related to [`SessionStore`][super::SessionStore].
    pub use crate::store_::errors;
    pub use crate::store_::{SessionRecord, SessionRecordRef, SessionStorageBackend};
}
