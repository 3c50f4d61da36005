pub mod jwt_iam_authentication_facade_impl;
