mod helpers;
mod home;
mod ping;
mod routing;
mod sign_in;
mod sign_out;
