pub mod application {
    pub mod item {
        pub mod find_all;
        pub mod find_by_id;
        pub mod save;
        pub mod ship;

        #[cfg(test)]
        pub(crate) mod in_memory;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod item {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod shipment;
        pub mod use_cases {
            pub mod find_all;
            pub mod find_by_id;
            pub mod save;
            pub mod ship;
        }
    }
}
