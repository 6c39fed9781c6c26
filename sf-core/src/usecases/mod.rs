mod auth;
mod community;
mod directions;
mod favorite;
mod review;
mod search;


pub use self::{auth::*, community::*, directions::*, favorite::*, review::*, search::*};

mod prelude {
    pub use crate::session::Session;
    pub use sf_boundary::*;
    pub use sf_frontend_api::{
        self as api, AuthApi, CommentApi, DirectionsApi, DirectionsQuery, FacilityApi,
        FacilityQuery, FavoriteApi, MetadataApi, PostApi, PostQuery, PostSort, Query, ReviewApi,
        DEFAULT_ROUTE_OPTION,
    };
    pub use thiserror::Error;
}
