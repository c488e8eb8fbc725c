use envchain::{join, prepend, Resolver};

const CACHE_CHAIN: &str = r#"
default = "localhost:6379"

[[source]]
var = "CACHE_ADDR"

[[source]]
merge = ["CACHE_HOST", "CACHE_PORT"]
join = ":"
"#;

fn main() -> Result<(), envchain::Error> {
    // Built in code
    let redis = Resolver::new()
        .add("REDIS_URL")
        .add_with_transform("REDIS_HOST", prepend("redis://"))
        .merge(
            join(":"),
            ["REDIS_PORT_6379_TCP_ADDR", "REDIS_PORT_6379_TCP_PORT"],
        )
        .with_default("localhost:6379");

    // Built from a description
    let cache = Resolver::from_toml(CACHE_CHAIN)?;

    println!("redis: {}", redis.resolve());
    match cache.resolve_ok() {
        Some(addr) => println!("cache: {addr}"),
        None => println!("cache: not configured"),
    }

    Ok(())
}
