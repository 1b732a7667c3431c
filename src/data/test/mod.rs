use crate::{
    data::{
        message_id::MessageIdStore,
        stats::{decode, StatsClient, StatsSource},
    },
    error::{internal::InternalError, stats::StatsError, AppError},
    model::api::RoomSummaryDto,
};
use test_utils::builder::{missing_dir, TestBuilder};
