use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use storefront_catalog::Catalog;
use storefront_core::{Aggregate, AggregateRoot, Entity, ProductId, SessionId};
use storefront_events::Event;

use crate::cart::{Cart, CartEntry};
use crate::visibility::CartVisibility;

/// Aggregate root: the whole storefront state of one session.
///
/// Catalog, cart and panel visibility change together, one command at a time,
/// so a reader never sees a cart that disagrees with the catalog flags it
/// was produced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    id: SessionId,
    catalog: Catalog,
    cart: Cart,
    visibility: CartVisibility,
    version: u64,
}

impl Storefront {
    /// Fresh session state: empty cart, hidden panel.
    pub fn new(id: SessionId, catalog: Catalog) -> Self {
        Self {
            id,
            catalog,
            cart: Cart::new(),
            visibility: CartVisibility::Hidden,
            version: 0,
        }
    }

    /// Fresh session over the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(SessionId::new(), Catalog::seed())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn visibility(&self) -> CartVisibility {
        self.visibility
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Decide and apply `command`, returning the applied events.
    pub fn dispatch(&mut self, command: &CartCommand) -> Vec<CartEvent> {
        let Ok(events) = self.execute(command);
        events
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.dispatch(&CartCommand::AddToCart(product_id))
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.dispatch(&CartCommand::RemoveFromCart(product_id))
    }

    pub fn toggle_cart_visibility(&mut self) -> Vec<CartEvent> {
        self.dispatch(&CartCommand::ToggleCartVisibility)
    }

    /// Whether every catalog flag matches cart membership.
    ///
    /// Holds for any sequence of commands a UI can issue (add only while the
    /// flag is false). Adding an id twice keeps it true but leaves a
    /// duplicate entry; removing an id that has no entry clears a flag that
    /// may have been set from outside the cart.
    pub fn is_consistent(&self) -> bool {
        self.catalog
            .iter()
            .all(|p| p.in_cart() == self.cart.contains(*p.id()))
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AggregateRoot for Storefront {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// User actions, one per click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    ToggleCartVisibility,
}

/// Event: a product snapshot was appended to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub entry: CartEntry,
}

/// Event: the product's flag was cleared and every cart entry with its id
/// removed. `entries_removed` is 0 when the cart held none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
    pub entries_removed: usize,
}

/// Event: the cart panel changed visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartVisibilityToggled {
    pub visibility: CartVisibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ProductAdded(ProductAdded),
    ProductRemoved(ProductRemoved),
    CartVisibilityToggled(CartVisibilityToggled),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ProductAdded(_) => "cart.product.added",
            CartEvent::ProductRemoved(_) => "cart.product.removed",
            CartEvent::CartVisibilityToggled(_) => "cart.visibility.toggled",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Storefront {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ProductAdded(e) => {
                self.cart.push(e.entry.clone());
                self.catalog.set_in_cart_mut(e.entry.product_id(), true);
            }
            CartEvent::ProductRemoved(e) => {
                self.cart.remove_all(e.product_id);
                self.catalog.set_in_cart_mut(e.product_id, false);
            }
            CartEvent::CartVisibilityToggled(e) => {
                self.visibility = e.visibility;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(match command {
            CartCommand::AddToCart(id) => self.decide_add(*id),
            CartCommand::RemoveFromCart(id) => self.decide_remove(*id),
            CartCommand::ToggleCartVisibility => {
                vec![CartEvent::CartVisibilityToggled(CartVisibilityToggled {
                    visibility: self.visibility.toggled(),
                })]
            }
        })
    }
}

impl Storefront {
    fn decide_add(&self, product_id: ProductId) -> Vec<CartEvent> {
        // Unknown ids are ignored. Ids already in the cart are appended again.
        match self.catalog.find(product_id) {
            Some(product) => vec![CartEvent::ProductAdded(ProductAdded {
                entry: CartEntry::snapshot(product),
            })],
            None => vec![],
        }
    }

    fn decide_remove(&self, product_id: ProductId) -> Vec<CartEvent> {
        // The flag is cleared even when nothing in the cart matches.
        vec![CartEvent::ProductRemoved(ProductRemoved {
            product_id,
            entries_removed: self.cart.count_of(product_id),
        })]
    }
}

/// Pure transition: the state that results from applying `command` to `state`.
pub fn reduce(state: Storefront, command: CartCommand) -> Storefront {
    let mut next = state;
    next.dispatch(&command);
    next
}
