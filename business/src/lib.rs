pub mod application {
    pub mod catalog {
        pub mod session;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod entry;
        pub mod errors;
        pub mod gateway;
        pub mod query;
        pub mod samples;
        pub mod summary;
        pub mod transfer;
    }
    pub mod product {
        pub mod draft;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
