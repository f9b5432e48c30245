pub mod shared {
    pub mod core {
        pub mod time;
    }
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod shifts {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod shift;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod get_current_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod start_shift {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod stop_shift {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod start_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod stop_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_shift_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod shift_repository;
            }
        }
    }
}

pub mod shell;
