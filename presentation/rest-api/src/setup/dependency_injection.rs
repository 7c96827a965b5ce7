use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::item::repository::ItemRepositoryInMemory;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get_all::GetAllCartsUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::patch::PatchItemUseCaseImpl;
use business::application::item::replace::ReplaceItemUseCaseImpl;
use business::domain::cart::repository::CartRepository;
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub item_api: ItemApi,
    pub cart_api: CartApi,
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyContainer {
    /// Wires the APIs over fresh, empty in-memory stores.
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(ItemRepositoryInMemory::new()),
            Arc::new(CartRepositoryInMemory::new()),
        )
    }

    pub fn with_repositories(
        item_repository: Arc<dyn ItemRepository>,
        cart_repository: Arc<dyn CartRepository>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Item use cases
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_item_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_items_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let replace_item_use_case = Arc::new(ReplaceItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let patch_item_use_case = Arc::new(PatchItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_carts_use_case = Arc::new(GetAllCartsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemToCartUseCaseImpl {
            cart_repository,
            item_repository,
            logger,
        });

        let item_api = ItemApi::new(
            create_item_use_case,
            get_item_use_case,
            get_all_items_use_case,
            replace_item_use_case,
            patch_item_use_case,
            delete_item_use_case,
        );

        let cart_api = CartApi::new(
            create_cart_use_case,
            get_cart_use_case,
            get_all_carts_use_case,
            add_item_use_case,
        );

        Self {
            health_api: HealthApi,
            item_api,
            cart_api,
        }
    }
}
