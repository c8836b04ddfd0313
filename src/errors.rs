use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unknown search strategy `{0}`")]
    UnknownStrategy(String), // Strategy code does not name one of the engines
    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String), // Name outside manhattan/euclidean/zero/diagonal/double_manhattan
    #[error("unknown action `{0}`")]
    UnknownAction(String), // Label outside up/down/left/right/tunnel
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SearchError::UnknownStrategy("ZZ".into()).to_string(), "unknown search strategy `ZZ`");
        assert_eq!(SearchError::UnknownHeuristic("octile".into()).to_string(), "unknown heuristic `octile`");
        assert_eq!(SearchError::UnknownAction("jump".into()).to_string(), "unknown action `jump`");
    }
}
