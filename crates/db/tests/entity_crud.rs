//! Integration tests for the repository layer against a real database.

use holonet_core::favorites::{FavoriteTarget, ACTING_USER_ID};
use holonet_db::models::favorito::Favorito;
use holonet_db::models::personaje::CreatePersonaje;
use holonet_db::models::planeta::CreatePlaneta;
use holonet_db::models::user::CreateUser;
use holonet_db::repositories::{FavoritoRepo, PersonajeRepo, PlanetaRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

fn new_personaje(first_name: &str) -> CreatePersonaje {
    CreatePersonaje {
        first_name: first_name.to_string(),
        last_name: "Skywalker".to_string(),
        height: 172,
        mass: 77,
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        homeworld: "Tatooine".to_string(),
    }
}

fn new_planeta(name: &str) -> CreatePlaneta {
    CreatePlaneta {
        name: name.to_string(),
        rotation_period: 23,
        orbital_period: 304,
        diameter: 10465,
        climate: "arid".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "desert".to_string(),
        surface_water: 1,
        population: 200_000,
    }
}

async fn acting_user(pool: &PgPool) {
    sqlx::query("INSERT INTO users (id, email, password) VALUES ($1, 'me@holonet.local', 'p')")
        .bind(ACTING_USER_ID)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("SELECT setval(pg_get_serial_sequence('users', 'id'), $1)")
        .bind(ACTING_USER_ID)
        .execute(pool)
        .await
        .unwrap();
}

async fn favoritos_for(pool: &PgPool, target: FavoriteTarget) -> Vec<Favorito> {
    let column = match target {
        FavoriteTarget::Planeta(_) => "planetas_id",
        FavoriteTarget::Personaje(_) => "personajes_id",
    };
    let query = format!(
        "SELECT id, user_id, planetas_id, personajes_id FROM favoritos WHERE {column} = $1 ORDER BY id"
    );
    sqlx::query_as::<_, Favorito>(&query)
        .bind(target.id())
        .fetch_all(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user_by_email(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("han@corellia.net"))
        .await
        .unwrap();
    assert_eq!(created.email, "han@corellia.net");
    assert_eq!(created.password, "secret");

    let found = UserRepo::find_by_email(&pool, "han@corellia.net")
        .await
        .unwrap()
        .expect("user should be found by email");
    assert_eq!(found.id, created.id);

    let missing = UserRepo::find_by_email(&pool, "HAN@corellia.net")
        .await
        .unwrap();
    assert!(missing.is_none(), "email match is exact");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@x.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@x.com"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_email"));

    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users_in_insertion_order(pool: PgPool) {
    UserRepo::create(&pool, &new_user("a@x.com")).await.unwrap();
    UserRepo::create(&pool, &new_user("b@x.com")).await.unwrap();

    let emails: Vec<String> = UserRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.email)
        .collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_personaje_create_find_list(pool: PgPool) {
    let luke = PersonajeRepo::create(&pool, &new_personaje("Luke"))
        .await
        .unwrap();
    PersonajeRepo::create(&pool, &new_personaje("Anakin"))
        .await
        .unwrap();

    let found = PersonajeRepo::find_by_id(&pool, luke.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, luke);
    assert!(PersonajeRepo::exists(&pool, luke.id).await.unwrap());
    assert!(!PersonajeRepo::exists(&pool, 999_999).await.unwrap());
    assert!(PersonajeRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());

    let all = PersonajeRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "Luke");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planeta_create_find_list(pool: PgPool) {
    let mut input = new_planeta("Coruscant");
    input.population = 1_000_000_000_000;
    let coruscant = PlanetaRepo::create(&pool, &input).await.unwrap();
    assert_eq!(coruscant.population, 1_000_000_000_000);

    let found = PlanetaRepo::find_by_id(&pool, coruscant.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, coruscant);
    assert!(!PlanetaRepo::exists(&pool, 999_999).await.unwrap());
    assert_eq!(PlanetaRepo::list(&pool).await.unwrap().len(), 1);
    assert_eq!(PlanetaRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_favorite_sets_only_planet_column(pool: PgPool) {
    acting_user(&pool).await;
    let planeta = PlanetaRepo::create(&pool, &new_planeta("Hoth")).await.unwrap();

    let fav = FavoritoRepo::create(&pool, ACTING_USER_ID, FavoriteTarget::Planeta(planeta.id))
        .await
        .unwrap();

    assert_eq!(fav.user_id, Some(ACTING_USER_ID));
    assert_eq!(fav.planetas_id, Some(planeta.id));
    assert_eq!(fav.personajes_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_favorite_creates_repeated_rows(pool: PgPool) {
    acting_user(&pool).await;
    let personaje = PersonajeRepo::create(&pool, &new_personaje("Luke"))
        .await
        .unwrap();
    let target = FavoriteTarget::Personaje(personaje.id);

    for _ in 0..3 {
        FavoritoRepo::create(&pool, ACTING_USER_ID, target)
            .await
            .unwrap();
    }

    let rows = favoritos_for(&pool, target).await;
    assert_eq!(rows.len(), 3);
    assert!(rows
        .iter()
        .all(|f| f.personajes_id == Some(personaje.id) && f.planetas_id.is_none()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_user_only_returns_that_user(pool: PgPool) {
    acting_user(&pool).await;
    let other = UserRepo::create(&pool, &new_user("other@x.com"))
        .await
        .unwrap();
    let planeta = PlanetaRepo::create(&pool, &new_planeta("Endor")).await.unwrap();
    let target = FavoriteTarget::Planeta(planeta.id);

    FavoritoRepo::create(&pool, ACTING_USER_ID, target)
        .await
        .unwrap();
    FavoritoRepo::create(&pool, other.id, target).await.unwrap();

    let mine = FavoritoRepo::list_by_user(&pool, ACTING_USER_ID)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, Some(ACTING_USER_ID));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_first_removes_lowest_id_regardless_of_owner(pool: PgPool) {
    acting_user(&pool).await;
    let other = UserRepo::create(&pool, &new_user("other@x.com"))
        .await
        .unwrap();
    let planeta = PlanetaRepo::create(&pool, &new_planeta("Bespin")).await.unwrap();
    let target = FavoriteTarget::Planeta(planeta.id);

    let first = FavoritoRepo::create(&pool, other.id, target).await.unwrap();
    let second = FavoritoRepo::create(&pool, ACTING_USER_ID, target)
        .await
        .unwrap();

    let deleted = FavoritoRepo::delete_first_by_target(&pool, target)
        .await
        .unwrap()
        .expect("a row should be deleted");
    assert_eq!(deleted.id, first.id);
    assert_eq!(deleted.user_id, Some(other.id));

    let remaining = favoritos_for(&pool, target).await;
    assert_eq!(remaining, vec![second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_first_with_no_match_is_noop(pool: PgPool) {
    acting_user(&pool).await;
    let planeta = PlanetaRepo::create(&pool, &new_planeta("Yavin IV"))
        .await
        .unwrap();
    FavoritoRepo::create(&pool, ACTING_USER_ID, FavoriteTarget::Planeta(planeta.id))
        .await
        .unwrap();

    // Same numeric id, other target kind: must not touch the planet favorite.
    let deleted = FavoritoRepo::delete_first_by_target(&pool, FavoriteTarget::Personaje(planeta.id))
        .await
        .unwrap();
    assert!(deleted.is_none());

    let remaining = FavoritoRepo::list_by_user(&pool, ACTING_USER_ID)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
}
