pub mod soundcloud;
