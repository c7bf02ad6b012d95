pub mod observations;
pub mod stats;
pub mod subscription;

pub use observations::ObservationFeed;
pub use stats::StatsFeed;
pub use subscription::ObservationSubscription;
