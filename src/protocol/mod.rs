mod messages;

pub use messages::{
    DEFAULT_SERVER_URL, EVALUATE_PATH, ErrorBody, EvaluateRequest, GENERATE_PATH, GenerateRequest,
    SelectedOption, non_blank,
};
