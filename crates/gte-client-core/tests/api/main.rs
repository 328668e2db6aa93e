mod helpers;
mod register;
mod sign_out;
mod update_profile;
