use super::prelude::*;

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("로그인이 필요합니다.")]
    LoginRequired,
    #[error(transparent)]
    Api(#[from] api::Error),
}

/// Adds or removes a favorite and returns the new state.
pub async fn toggle_favorite<A>(
    api: &A,
    session: &Session,
    facility_id: i64,
    is_favorite: bool,
) -> Result<bool, FavoriteError>
where
    A: FavoriteApi,
{
    if !session.is_logged_in() {
        return Err(FavoriteError::LoginRequired);
    }
    if is_favorite {
        api.remove_favorite(facility_id).await?;
        log::debug!("Removed facility {facility_id} from the favorites");
    } else {
        api.add_favorite(facility_id).await?;
        log::debug!("Added facility {facility_id} to the favorites");
    }
    Ok(!is_favorite)
}

/// Anonymous users never have favorites.
pub async fn favorite_status<A>(api: &A, session: &Session, facility_id: i64) -> bool
where
    A: FavoriteApi,
{
    if !session.is_logged_in() {
        return false;
    }
    match api.favorite_status(facility_id).await {
        Ok(status) => status.is_favorite,
        Err(err) => {
            log::warn!("Unable to fetch the favorite status of facility {facility_id}: {err}");
            false
        }
    }
}

/// The favorites of the current user resolved to facilities.
///
/// Facilities that can no longer be loaded are skipped.
pub async fn my_favorite_facilities<A>(
    api: &A,
    session: &Session,
) -> Result<Vec<Facility>, FavoriteError>
where
    A: FavoriteApi + FacilityApi,
{
    if !session.is_logged_in() {
        return Err(FavoriteError::LoginRequired);
    }
    let favorites = api.my_favorites().await?;
    let mut facilities = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        match api.facility(favorite.facility_id).await {
            Ok(mut facility) => {
                facility.is_favorite = true;
                facilities.push(facility);
            }
            Err(err) => {
                log::warn!(
                    "Unable to load favorite facility {}: {err}",
                    favorite.facility_id
                );
            }
        }
    }
    Ok(facilities)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[tokio::test]
    async fn toggle_without_login_makes_no_call() {
        let api = MockApi::default();
        let err = toggle_favorite(&api, &Session::default(), 1, false)
            .await
            .unwrap_err();
        assert!(matches!(err, FavoriteError::LoginRequired));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn toggle_adds_and_removes() {
        let api = MockApi::default();
        let session = logged_in();
        assert!(toggle_favorite(&api, &session, 1, false).await.unwrap());
        assert!(favorite_status(&api, &session, 1).await);
        assert!(!toggle_favorite(&api, &session, 1, true).await.unwrap());
        assert!(!favorite_status(&api, &session, 1).await);
        assert_eq!(
            api.calls(),
            vec![
                "POST /api/favorites/1",
                "GET /api/favorites/1/status",
                "DELETE /api/favorites/1",
                "GET /api/favorites/1/status",
            ]
        );
    }

    #[tokio::test]
    async fn failed_toggle_keeps_the_error() {
        let api = MockApi::default();
        api.fail_with(500, None);
        let err = toggle_favorite(&api, &logged_in(), 1, false)
            .await
            .unwrap_err();
        assert!(matches!(err, FavoriteError::Api(_)));
    }

    #[tokio::test]
    async fn status_of_anonymous_users() {
        let api = MockApi::default();
        assert!(!favorite_status(&api, &Session::default(), 1).await);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn resolve_favorites_to_facilities() {
        let api = MockApi::default();
        api.facilities.borrow_mut().push(facility(1));
        api.favorites.borrow_mut().extend([1, 2]);
        let facilities = my_favorite_facilities(&api, &logged_in()).await.unwrap();
        assert_eq!(facilities.len(), 1);
        assert!(facilities[0].is_favorite);
        assert_eq!(
            api.calls(),
            vec![
                "GET /api/favorites",
                "GET /api/facilities/1",
                "GET /api/facilities/2",
            ]
        );
    }
}
