mod helpers;

use futures::future::join_all;
use helpers::{create_fake_user, create_video, get_user, get_video};
use vidsocial_dal::entities::{user::User, video::Video};
use vidsocial_dal::interfaces::repositories::{
    users::UsersRepositoryInterface, videos::VideosRepositoryInterface,
};
use vidsocial_dal::middleware::error::{AppError, ErrorKind};
use vidsocial_dal::services::favorite_service::FavoriteService;

const LIKE: i32 = 1;
const UNLIKE: i32 = 2;

test_with_db!(like_increments_count_and_lists, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 3).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let count = favorite_service
        .favorite_action(5, 10, LIKE)
        .await
        .expect("like");
    assert_eq!(count, 4);

    let video = get_video(&db, 10).await;
    assert_eq!(video.favorite_count, 4);
    assert_eq!(video.favorites, vec![5]);
    let user = get_user(&db, 5).await;
    assert_eq!(user.favorite_list, vec![10]);
});

test_with_db!(like_then_unlike_restores_state, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);
    let video_before = get_video(&db, 10).await;
    let user_before = get_user(&db, 5).await;

    favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    let count = favorite_service
        .favorite_action(5, 10, UNLIKE)
        .await
        .expect("unlike");
    assert_eq!(count, 0);

    assert_eq!(get_video(&db, 10).await, video_before);
    assert_eq!(get_user(&db, 5).await, user_before);
});

test_with_db!(repeated_like_is_a_no_op, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    let count = favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    assert_eq!(count, 1);

    let video = get_video(&db, 10).await;
    assert_eq!(video.favorites, vec![5]);
    assert_eq!(video.favorite_count, 1);
    assert_eq!(get_user(&db, 5).await.favorite_list, vec![10]);
});

test_with_db!(unlike_never_goes_below_zero, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 0).await;
    db.videos
        .create(Video {
            favorites: vec![5],
            favorite_count: 0,
            ..Video::new(11)
        })
        .await
        .unwrap();
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let count = favorite_service.favorite_action(5, 10, UNLIKE).await.unwrap();
    assert_eq!(count, 0);
    assert_eq!(get_video(&db, 10).await.favorite_count, 0);

    let count = favorite_service.favorite_action(5, 11, UNLIKE).await.unwrap();
    assert_eq!(count, 0);
    let video = get_video(&db, 11).await;
    assert_eq!(video.favorite_count, 0);
    assert!(video.favorites.is_empty());
});

test_with_db!(unlike_removes_every_occurrence, |db| {
    db.users
        .create(User {
            favorite_list: vec![10, 11, 10],
            ..User::new(5, "dup_liker".to_string())
        })
        .await
        .unwrap();
    db.videos
        .create(Video {
            favorites: vec![5, 6, 5],
            favorite_count: 3,
            ..Video::new(10)
        })
        .await
        .unwrap();
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let count = favorite_service.favorite_action(5, 10, 0).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(get_user(&db, 5).await.favorite_list, vec![11]);
    assert_eq!(get_video(&db, 10).await.favorites, vec![6]);
});

test_with_db!(favorite_missing_user_or_video, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 2).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let err = favorite_service
        .favorite_action(6, 10, LIKE)
        .await
        .expect_err("missing user");
    assert_eq!(
        err,
        AppError::EntityFailIdNotFound {
            ident: "user:6".to_string()
        }
    );

    let err = favorite_service
        .favorite_action(5, 11, LIKE)
        .await
        .expect_err("missing video");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err,
        AppError::EntityFailIdNotFound {
            ident: "video:11".to_string()
        }
    );

    let video = get_video(&db, 10).await;
    assert_eq!(video.favorite_count, 2);
    assert!(video.favorites.is_empty());
    assert!(get_user(&db, 5).await.favorite_list.is_empty());
});

test_with_db!(favorite_list_in_like_order, |db| {
    create_fake_user(&db, 5).await;
    for id in [10, 11, 12] {
        create_video(&db, id, 0).await;
    }
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);
    favorite_service.favorite_action(5, 12, LIKE).await.unwrap();
    favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    favorite_service.favorite_action(5, 11, LIKE).await.unwrap();
    favorite_service.favorite_action(5, 10, UNLIKE).await.unwrap();

    let videos = favorite_service.get_favorite_list(5).await.unwrap();
    let ids: Vec<i64> = videos.iter().map(|v| v.video_id).collect();
    assert_eq!(ids, vec![12, 11]);
    assert_eq!(videos[0].favorite_count, 1);
    assert_eq!(videos[0].title, Some("video 12".to_string()));
});

test_with_db!(favorite_list_skips_deleted_videos, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 0).await;
    create_video(&db, 11, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);
    favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    favorite_service.favorite_action(5, 11, LIKE).await.unwrap();

    db.client
        .query("DELETE video:10;")
        .await
        .unwrap()
        .check()
        .unwrap();

    assert_eq!(get_user(&db, 5).await.favorite_list, vec![10, 11]);
    let videos = favorite_service.get_favorite_list(5).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].video_id, 11);
});

test_with_db!(favorite_entries_report_deleted_videos, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 0).await;
    create_video(&db, 11, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);
    favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    favorite_service.favorite_action(5, 11, LIKE).await.unwrap();

    db.client
        .query("DELETE video:11;")
        .await
        .unwrap()
        .check()
        .unwrap();

    let entries = favorite_service.get_favorite_entries(5).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, 10);
    assert_eq!(entries[0].1.as_ref().map(|v| v.video_id), Some(10));
    assert_eq!(entries[1], (11, None));
});

test_with_db!(like_keeps_other_entries_untouched, |db| {
    db.users
        .create(User {
            favorite_list: vec![10, 11, 10],
            ..User::new(5, "dup_liker".to_string())
        })
        .await
        .unwrap();
    create_video(&db, 12, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    favorite_service.favorite_action(5, 12, LIKE).await.unwrap();
    assert_eq!(get_user(&db, 5).await.favorite_list, vec![10, 11, 10, 12]);

    favorite_service.favorite_action(5, 12, LIKE).await.unwrap();
    assert_eq!(get_user(&db, 5).await.favorite_list, vec![10, 11, 10, 12]);
    assert_eq!(get_video(&db, 12).await.favorites, vec![5]);
});

test_with_db!(concurrent_likes_keep_count_in_step, |db| {
    for id in 1..=20 {
        create_fake_user(&db, id).await;
    }
    create_video(&db, 10, 0).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let results = join_all((1..=20).map(|id| favorite_service.favorite_action(id, 10, LIKE))).await;

    let mut liked = 0;
    for res in results.iter() {
        match res {
            Ok(_) => liked += 1,
            // conflicting transactions are reported, not retried
            Err(err) => assert_eq!(err.kind(), ErrorKind::Infrastructure),
        }
    }
    assert!(liked > 0);

    let video = get_video(&db, 10).await;
    assert_eq!(video.favorite_count, video.favorites.len() as i64);
    assert_eq!(video.favorites.len(), liked);
    for user_id in video.favorites.iter() {
        assert_eq!(get_user(&db, *user_id).await.favorite_list, vec![10]);
    }
});

test_with_db!(like_returns_counts_beyond_u32, |db| {
    create_fake_user(&db, 5).await;
    create_video(&db, 10, 5_000_000_000).await;
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);

    let count = favorite_service.favorite_action(5, 10, LIKE).await.unwrap();
    assert_eq!(count, 5_000_000_001);
    assert_eq!(get_video(&db, 10).await.favorite_count, 5_000_000_001);
});

test_with_db!(favorite_list_of_missing_user, |db| {
    let favorite_service = FavoriteService::new(&db.favorites, &db.users, &db.videos);
    let err = favorite_service
        .get_favorite_list(1)
        .await
        .expect_err("missing user");
    assert_eq!(err.kind(), ErrorKind::NotFound);
});
