mod user_dto;

pub use user_dto::{
    EmailAvailabilityDto, ProfileResponseDto, RegisterUserDto, UpdateProfileDto, UserResponseDto,
    ValidateEmailQuery,
};
