use crate::domain::Position;
use crate::feed::FeedError;

#[derive(Debug)]
pub enum FeedEvent {
    PositionUpdated(Position),
    PositionUnavailable(FeedError),
}
