// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod modules {
    pub mod scores {
        pub mod core {
            pub mod event_score;
            pub mod ports;
            pub mod scoring;
        }
        pub mod use_cases {
            pub mod get_score {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_scores {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_scores {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod draws;
                pub mod registry_in_memory;
            }
        }
    }
}

pub mod shell;
