mod admin_dtos;

pub use admin_dtos::{AdminRequestDto, AdminSummaryDto, RequestQueueQuery};
