use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// `true` until the component unmounts. Async work checks it before writing
/// results back into component state.
#[hook]
pub fn use_mounted() -> Rc<RefCell<bool>> {
    let mounted = use_mut_ref(|| true);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                *mounted.borrow_mut() = true;
                move || *mounted.borrow_mut() = false
            },
            (),
        );
    }
    mounted
}
