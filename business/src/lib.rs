pub mod application {
    pub mod product {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod service;
        pub mod value_objects;
    }
}
