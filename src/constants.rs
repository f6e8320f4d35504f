pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
}

pub mod default {
    pub const ALLOW_ORIGIN: &str = "*";
    pub const ALLOW_HEADERS: &str =
        "Authorization, Content-Type, x-requested-with, origin, true-client-ip, X-Correlation-ID";
    pub const ALLOW_METHODS: &str = "PUT, POST, GET, DELETE, OPTIONS, PATCH";
}
