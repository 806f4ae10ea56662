pub mod certificate;
pub mod education;
pub mod experience;
pub mod fact;
pub mod project;
pub mod resume;
pub mod service;
pub mod skill;
pub mod token;
pub mod upload;
