pub mod u510_image_query;
