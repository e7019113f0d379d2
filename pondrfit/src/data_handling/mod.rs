pub mod pondrfit;
