pub mod config;

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod remote_client;
    }
}

pub mod modules {
    pub mod commitments {
        pub mod core {
            pub mod commitment;
            pub mod deadline;
            pub mod reference;
        }
        pub mod adapters {
            pub mod mappers {
                pub mod record_mapper;
            }
        }
        pub mod application {
            pub mod commitment_store;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_commitments {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query_view;
            }
            pub mod manage_commitments {
                pub mod admin_gate;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_commitments {
                pub mod csv;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
