mod pet_dto;

pub use pet_dto::{
    validate_image, validate_not_future, FindPetsQuery, PetDetailDto, PetResponseDto,
    PetSearchFilters, ReportCreatedDto, ReportFoundPetDto, ReportLostPetDto, ValidatedImage,
};
