//! View-model layer: per-view state snapshots and the optimistic update
//! pattern, with no rendering concern. Each view owns its own fetched
//! copies; nothing here is shared or cached across views.

pub mod feed;
pub mod post_card;
pub mod profile;
pub mod story_bar;

pub use feed::FeedView;
pub use post_card::PostCard;
pub use profile::{EditProfileForm, ProfileView};
pub use story_bar::{StoryBar, StoryComposer, StoryGroup};
