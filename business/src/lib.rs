pub mod application {
    pub mod account {
        pub mod login;
        pub mod password;
        pub mod register;
    }
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod get;
        pub mod merge;
        pub mod remove;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod list_categories;
        pub mod list_products;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod account {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get;
            pub mod merge;
            pub mod remove;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod query;
        pub mod use_cases {
            pub mod list_categories;
            pub mod list_products;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
    }
}
