//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key dependencies where asked to,
//! keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let park = factory::create_park(&db).await?;
//!     let trail = factory::create_trail(&db, park.id).await?;
//!
//!     // Create with all dependencies
//!     let (park, trail) = factory::helpers::create_trail_with_park(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let park = factory::park::ParkFactory::new(&db)
//!     .name("Yellowstone")
//!     .state("WY")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod park;
pub mod trail;

// Re-export commonly used factory functions for concise usage
pub use helpers::create_trail_with_park;
pub use park::create_park;
pub use trail::create_trail;
