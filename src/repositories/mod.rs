pub mod guide_repository;

pub use guide_repository::{FileGuideRepository, GuideRepository};
