//! Client SDK for the Comptoir analytics API
//!
//! One typed method per endpoint, over HTTP:
//!
//! ```no_run
//! use comptoir_sdk::RemoteClient;
//!
//! # async fn demo() -> Result<(), comptoir_sdk::SdkError> {
//! let client = RemoteClient::new("http://localhost:5001");
//! for suggestion in client.suggestions("Alice Martin").await? {
//!     println!("{} ({}): score {}", suggestion.produit_suggere, suggestion.prix, suggestion.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod remote;

pub use error::{SdkError, SdkResult};
pub use models::{
    ClientName, ProductBuyer, ProductName, ProductOrder, PurchasedProduct, ServiceStatus, Stats,
    Suggestion,
};
pub use remote::RemoteClient;
