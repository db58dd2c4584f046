use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Signing a session token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign session token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// Stored ledger entries sum outside the `i64` range.
    #[error("Ledger balance of group {0} overflows")]
    BalanceOverflow(i32),

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
