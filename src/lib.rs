pub mod shared {
    pub mod core {
        pub mod provider_error;
    }
    pub mod infrastructure {
        pub mod error_body;
        pub mod request_fields;
    }
}

pub mod modules {
    pub mod lead_events {
        pub mod core {
            pub mod errors;
            pub mod lead_event;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod lead_event_store;
            }
        }
        pub mod use_cases {
            pub mod create_lead_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_lead_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_lead_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod messaging {
        pub mod core {
            pub mod ports;
        }
        pub mod use_cases {
            pub mod send_sms {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod twilio;
            }
        }
    }
    pub mod calendar {
        pub mod core {
            pub mod ports;
        }
        pub mod use_cases {
            pub mod schedule_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod authorize_calendar {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod google_calendar;
            }
        }
    }
}

pub mod shell;
