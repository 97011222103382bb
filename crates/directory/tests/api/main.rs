mod helpers;
mod home_page;
