mod helpers;

mod authorizations_test;
mod users_test;
