pub mod shared {
    pub mod infrastructure {
        pub mod credentials;
        pub mod spreadsheet_client;
    }
}

pub mod modules {
    pub mod timesheets {
        pub mod core {
            pub mod engine;
            pub mod formulas;
            pub mod layout;
            pub mod render;
            pub mod row_write;
            pub mod shift;
            pub mod timestamp;
        }
        pub mod use_cases {
            pub mod acknowledgement;
            pub mod application_error;
            pub mod graphql_types;
            pub mod record_punch {
                pub mod command;
                pub mod handler;
                pub mod policy;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_timesheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_spreadsheet {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod timesheet_flow_tests;
    }
}
