/// Authentication shared by every node of a topology.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RedisCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}
