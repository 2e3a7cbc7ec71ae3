//! # Service Registry
//!
//! 싱글톤 기반 의존성 컨테이너입니다.
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[repository] 매크로 → RepositoryRegistration 제출
//!    ├─ 서비스 모듈의 inventory::submit! → ServiceRegistration 제출
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화
//!    ├─ Database, RedisClient → ServiceLocator::set()
//!    └─ ServiceLocator::initialize_all() → 등록된 모든 인스턴스 생성
//!
//! 3. 조회
//!    └─ ServiceLocator::get::<T>() → 캐시된 Arc<T> 또는 등록 정보로 생성
//! ```
//!
//! 이름 매칭은 타입 이름에서 `Service`/`Repository` 접미사를 떼고,
//! 밑줄을 제거한 소문자로 비교합니다. 예를 들어 `ReservationGuestService` 타입은
//! `"reservation_guest"`로 등록된 서비스와 매칭됩니다.
//!
//! 순환 의존은 초기화 중인 타입 집합으로 감지하며, 감지되면 기동 단계에서 패닉합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{error, info};
use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 비즈니스 서비스 공통 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리 공통 trait
///
/// `#[repository]` 매크로가 구현을 생성합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `constructor`는 `Box<Arc<Service>>`를 반환해야 합니다.
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (normalize_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (normalize_name(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름과 타입 이름을 같은 키로 맞춥니다.
///
/// `reservation_guest_service`, `reservation_guest`, `ReservationGuest` → `reservationguest`
fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered
        .strip_suffix("_service")
        .or_else(|| lowered.strip_suffix("_repository"))
        .or_else(|| lowered.strip_suffix("service"))
        .or_else(|| lowered.strip_suffix("repository"))
        .unwrap_or(&lowered);

    trimmed.replace('_', "")
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 싱글톤을 반환합니다.
    ///
    /// 이미 생성된 인스턴스가 없으면 등록 정보에서 찾아 생성합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존이 감지된 경우. 모두 기동 시점의 설정 오류입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        LOCATOR.initializing.write().unwrap().insert(type_id);

        let result = std::panic::catch_unwind(|| Self::create::<T>(type_id, type_name));

        LOCATOR.initializing.write().unwrap().remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                error!("Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn create<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);
        let key = normalize_name(&clean_type_name);

        let boxed_instance = if clean_type_name.ends_with("Repository") {
            let registration = REPOSITORY_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No repository found for: {}", clean_type_name));
            (registration.constructor)()
        } else if clean_type_name.ends_with("Service") {
            let registration = SERVICE_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No service found for: {}", clean_type_name));
            (registration.constructor)()
        } else {
            panic!(
                "Service not found: {}. Register it with #[repository], inventory::submit!, or ServiceLocator::set()",
                type_name
            );
        };

        let instance = match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => (*arc_instance).clone(),
            Err(_) => panic!("Type mismatch for registration: {}", clean_type_name),
        };

        // 생성자가 재귀적으로 같은 타입을 등록했을 수 있으므로 먼저 들어간 인스턴스를 유지한다
        let mut instances = LOCATOR.instances.write().unwrap();
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().expect("Type mismatch in ServiceLocator")
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 인프라 인스턴스를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        info!("📦 Registering: {}", clean_name);

        LOCATOR.instances.write().unwrap().insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 리포지토리를 먼저, 서비스를 다음으로 모두 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
