//! Database repositories
//!
//! Repositories handle all direct database interactions. Every mutation is a
//! single statement and therefore its own atomic unit; cascades are carried
//! out by the foreign keys.

pub mod country_repo;
pub mod entry_repo;
pub mod event_repo;
pub mod participant_repo;
pub mod performance_repo;

pub use country_repo::CountryRepository;
pub use entry_repo::EntryRepository;
pub use event_repo::EventRepository;
pub use participant_repo::ParticipantRepository;
pub use performance_repo::PerformanceRepository;
