mod helpers;

mod auth_test;
