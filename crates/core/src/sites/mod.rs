//! Sites module - domain model, repository, and search service.

mod sites_model;
mod sites_repository;
mod sites_service;
mod sites_traits;

// Re-export the public interface
pub use sites_model::Site;
pub use sites_repository::SiteRepository;
pub use sites_service::SiteSearchService;
pub use sites_traits::{SiteRepositoryTrait, SiteSearchServiceTrait};
