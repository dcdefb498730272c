pub mod use_hash_route;
