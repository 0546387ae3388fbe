pub mod interface;
pub mod channel;
pub mod trigger;

pub use interface::AudioElement;
pub use channel::ChannelAudioElement;
pub use trigger::PlaybackTrigger;
