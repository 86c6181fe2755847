mod health_check;
mod helper;
mod landing;
