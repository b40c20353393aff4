// Authentication: JWT handling, roles and the mock login user

pub mod jwt;
pub mod mock_user;
pub mod role;
