mod request_dto;

pub use request_dto::{
    HistoryQuery, RequestResponseDto, RequestWithPetDto, UpdateRequestDto, UpdateRequestStatusDto,
};
